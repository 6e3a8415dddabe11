/// Build, render, and compile a pattern once, returning the same
/// `&'static Regex` on every later evaluation. The pattern must compile;
/// a failure is a programming error and panics.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<$crate::compiling::Regex> = OnceLock::new();
        REGEX.get_or_init(|| {
            $crate::Pattern::from($pattern)
                .compile(
                    &$crate::Settings::default(),
                    &$crate::CompileOptions::default(),
                )
                .unwrap_or_else(|e| panic!("{}", e))
        })
    }};
}
