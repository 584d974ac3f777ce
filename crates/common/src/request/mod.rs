pub mod category_request;
pub mod product_request;

pub use category_request::CategoryPayload;
pub use product_request::ProductPayload;

pub const DEFAULT_CATEGORY_COLOR: &str = "bg-gradient-to-br from-gray-400 to-gray-600";

/// Color tokens offered when creating or editing a category, as `(label, class)`.
pub const CATEGORY_COLOR_PRESETS: &[(&str, &str)] = &[
    ("Pink / Purple", "bg-gradient-to-br from-pink-400 to-purple-500"),
    ("Teal / Blue", "bg-gradient-to-br from-teal-400 to-blue-500"),
    ("Yellow / Orange", "bg-gradient-to-br from-yellow-400 to-orange-500"),
    ("Gray", DEFAULT_CATEGORY_COLOR),
];
