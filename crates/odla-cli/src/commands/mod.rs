// Each top-level command has its own submodule.

pub mod calendar;
pub mod lists;
pub mod plants;
pub mod profile;
pub mod task;
