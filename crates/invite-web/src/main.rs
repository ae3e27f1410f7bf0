mod app;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(
  run_in_browser
);

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting invitation page script"
  );

  let Some(document) = web_sys::window()
    .and_then(|window| window.document())
  else {
    tracing::error!(
      "no document; nothing to mount"
    );
    return;
  };

  let config =
    app::config::load_invite_config(
      &document
    );
  app::mount(&document, &config);
}
