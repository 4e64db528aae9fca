use figment::Jail;

/// Point the user-level config directory into the jail so a developer's own
/// `~/.config/kdecl/config.toml` never leaks into a test.
pub fn isolate_user_config(jail: &mut Jail) {
    let home = jail.directory().to_path_buf();
    jail.set_env("HOME", home.display());
    jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
}
