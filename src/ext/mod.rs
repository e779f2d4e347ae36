mod case_insensitive_ext;

pub use case_insensitive_ext::CaseInsensitiveExt;
