//! Targets for the [`tracing`] macros, e.g. `info!(target: RENDER, ...)`.
//! Every target is prefixed with the crate name, so `RUST_LOG=raytracer::render=debug` works.

macro_rules! tracing_targets {
    {$( $name:ident = $val:literal ),* $(,)?} => {
        $( pub const $name: &str = concat!(env!("CARGO_PKG_NAME"), "::", $val); )*
    };
}

tracing_targets! {
    MAIN = "main",
    RENDER = "render",
    SCENE = "scene",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_are_prefixed_with_crate_name() {
        assert_eq!(RENDER, "raytracer::render");
        assert_eq!(SCENE, "raytracer::scene");
        assert_eq!(MAIN, "raytracer::main");
    }
}
