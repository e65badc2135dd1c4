pub(crate) mod antialiased;
pub(crate) mod backend;
pub(crate) mod blend;
pub(crate) mod crisp;
pub(crate) mod shape;
