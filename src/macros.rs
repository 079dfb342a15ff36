/// A utility macro for building a [`Record`] with a comment and extra
/// properties.
///
/// # Examples
///
/// ```
/// use screenlog::{level, record};
///
/// let record = record!("pipeline", level::WARN, "input is empty", PID = 4242, NODE = 3);
///
/// assert_eq!(record.log(), "pipeline");
/// assert_eq!(record.properties().get("PID").and_then(|v| v.as_int()), Some(4242));
/// ```
///
/// [`Record`]: crate::Record
#[macro_export]
macro_rules! record {
    ($log:expr, $verbosity:expr, $comment:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        let record = $crate::Record::new($log, $verbosity).comment($comment);
        $( let record = record.with(stringify!($key), $value); )*
        record
    }};
}
