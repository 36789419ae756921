pub mod create_gif;
