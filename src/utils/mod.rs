pub mod environment;
pub mod files;
pub mod terminal;

pub use environment::{STOPWORDS_ENV, resolve_stopwords_path};
pub use files::{
    MAX_EXPORT_SIZE_BYTES, MAX_WORD_LIST_SIZE_BYTES, format_path_with_tilde, read_text_file,
    validate_file_size,
};
pub use terminal::sanitize_cell;
