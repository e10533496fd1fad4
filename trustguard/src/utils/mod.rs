pub mod config_paths;
