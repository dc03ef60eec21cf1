pub mod jsx_sort_props;

pub use jsx_sort_props::JsxSortProps;
