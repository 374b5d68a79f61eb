//! Browser entry point: mounts the root component onto `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        leptos::mount::mount_to_body(session_gate::app::App);
    }
}
