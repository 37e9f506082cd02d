pub mod pixelize;
pub mod play;
pub mod suggest;
