pub(crate) mod ppm;
