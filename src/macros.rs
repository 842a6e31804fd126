/// Progress line with a local timestamp prefix, similar to `info!` in
/// tracing. Takes a format string and arguments, like `println!`.
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let now = ::chrono::Local::now();
        println!("{} : {}", now.format("%H:%M:%S%.3f"), format!($strfm, $($arg),*));
    }};
}
