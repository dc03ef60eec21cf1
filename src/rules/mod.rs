pub mod style;

pub use style::JsxSortProps;
