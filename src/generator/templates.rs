//! Text templates for generated launchers

use std::path::Path;

/// Launch script used both as a `.command` file and as a bundle stub
pub fn launch_script(target: &Path, argument: &str) -> String {
    format!(
        "#!/bin/bash\nopen \"{}\" --args {}\n",
        escape_double_quoted(&target.to_string_lossy()),
        argument
    )
}

/// AppleScript source compiled into a double-clickable application
pub fn applescript(target: &Path, argument: &str) -> String {
    format!(
        "on run\n\tdo shell script \"open \" & quoted form of \"{}\" & \" --args {}\"\nend run\n",
        escape_applescript(&target.to_string_lossy()),
        escape_applescript(argument)
    )
}

/// Reverse-domain bundle identifier: spaces are dropped from the name
pub fn bundle_identifier(prefix: &str, name: &str) -> String {
    format!("{prefix}.{}", name.replace(' ', ""))
}

/// Info.plist for a structured bundle whose executable is named `name`
pub fn info_plist(name: &str, icon_file: &str, identifier: &str) -> String {
    let name = escape_xml(name);
    let icon_file = escape_xml(icon_file);
    let identifier = escape_xml(identifier);

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleExecutable</key>
    <string>{name}</string>
    <key>CFBundleIconFile</key>
    <string>{icon_file}</string>
    <key>CFBundleIdentifier</key>
    <string>{identifier}</string>
    <key>CFBundleName</key>
    <string>{name}</string>
    <key>CFBundlePackageType</key>
    <string>APPL</string>
    <key>CFBundleVersion</key>
    <string>1.0</string>
</dict>
</plist>
"#
    )
}

/// Escape for use inside a bash double-quoted string
fn escape_double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape for use inside an AppleScript string literal
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
