mod misc;
pub(crate) use misc::*;

mod mask_ops;
pub(crate) use mask_ops::*;
