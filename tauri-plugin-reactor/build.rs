const COMMANDS: &[&str] = &["invoke", "get_user_agent", "install_apk", "get_apk_info"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
