// src/macros.rs

/// Owned `String` shorthand.
///
/// `s!()` is empty, `s!(x)` is `String::from(x)` for anything `&str`-like,
/// and `s!("{}-{}", a, b)` formats.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
    ($fmt:literal, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
}
