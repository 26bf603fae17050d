//! Cloudboard engine: upload decoding, image rendering and file output.
pub mod cloud;
mod decode;
mod filename;
mod persist;
mod upload;

pub use cloud::{save_cloud, CloudSettings, Placement, RenderError, WordCloud};
pub use decode::{decode_utf8, DecodeError, DecodedText};
pub use filename::{slugify, DEFAULT_CLOUD_FILENAME};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use upload::{load_text_file, upload_name, UploadError, UploadedText, MAX_UPLOAD_BYTES};
