pub mod frame_collector;
pub mod frame_list;
pub mod frame_name;
pub mod gif_file;
pub mod input_source;

// --- public re-exports ---
pub use frame_collector::{collect_frame_paths, OrderedFramePaths};
pub use frame_list::FrameList;
pub use gif_file::create_gif::{GifFile, GifOptions};
pub use input_source::directory_path::DirectoryPath;
