//! Filesystem locations derived from the user's environment.

pub mod xdg_root;
