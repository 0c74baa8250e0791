pub(crate) mod composite;
pub(crate) mod transform;
