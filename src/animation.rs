pub(crate) mod morph;
