pub mod spigot;
