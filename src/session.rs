pub(crate) mod latest;
