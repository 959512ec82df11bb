mod tree_renderer;

pub use tree_renderer::{RenderError, TreeRenderer};
