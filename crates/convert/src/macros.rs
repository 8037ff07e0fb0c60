/// Build a [`Request`](crate::Request) of the given frames, named after
/// the bindings through which they're passed. Frames passed as other
/// expressions are anonymous.
///
/// ```ignore
/// let request = convert::request!(sales, returns);
/// ```
#[macro_export]
macro_rules! request {
    ($($frame:expr),+ $(,)?) => {
        $crate::Request::new()
            $(.binding(stringify!($frame), &$frame))+
    };
}

/// Materialize frames into collections of a pipeline, labeling the applied
/// transform after the bindings of the frames.
///
/// ```ignore
/// let out = convert::materialize!(session, &mut pipeline, sales, returns)?;
/// ```
#[macro_export]
macro_rules! materialize {
    ($session:expr, $pipeline:expr, $($frame:expr),+ $(,)?) => {
        $session.materialize($pipeline, $crate::request!($($frame),+))
    };
}
