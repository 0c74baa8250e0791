pub(crate) mod backend;
pub(crate) mod png;
pub(crate) mod text;
