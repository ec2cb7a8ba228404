//! Redirect page generation for the site root and version entry points

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::LATEST_DIR;

/// Renders a redirect page forwarding to the given URL
///
/// The page redirects three ways: meta refresh, a script for browsers that
/// ignore the meta tag, and a visible link as the last resort.
pub fn version_redirect_page(title: &str, target_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta http-equiv="refresh" content="0; url={target_url}">
    <script>
        window.location.href = '{target_url}';
    </script>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }}
        .container {{
            text-align: center;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <p>Redirecting to the documentation...</p>
        <p><a href="{target_url}">Click here if you are not redirected automatically</a></p>
    </div>
</body>
</html>"#
    )
}

/// Renders the site-root page forwarding to the latest version
pub fn root_redirect_page(title: &str) -> String {
    version_redirect_page(title, &format!("./{}/", LATEST_DIR))
}

/// Writes the root redirect page as `index.html` under the build output
/// directory, creating parent directories as needed
pub fn write_root_redirect(out_dir: &Path, title: &str) -> io::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;

    let index_path = out_dir.join("index.html");
    std::fs::write(&index_path, root_redirect_page(title))?;

    info!("Root redirect page written to {}", index_path.display());
    Ok(index_path)
}
