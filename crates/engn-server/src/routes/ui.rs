//! Front-end routes.
//!
//! The built single-page app is served from the configured static
//! directory. Any path that does not name a file gets `index.html`, so
//! client-side routes survive a reload. Without a build on disk every such
//! path gets a small placeholder landing page instead.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::response::Html;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::state::AppState;

/// Attach the front-end as the fallback of `router`.
pub fn attach(router: Router<Arc<AppState>>, static_dir: &Path) -> Router<Arc<AppState>> {
    let index = static_dir.join("index.html");
    if index.is_file() {
        info!(dir = %static_dir.display(), "serving front-end build");
        let spa = ServeDir::new(static_dir).fallback(ServeFile::new(index));
        router.fallback_service(spa)
    } else {
        warn!(
            dir = %static_dir.display(),
            "no front-end build found, serving placeholder page"
        );
        router.fallback(placeholder_page)
    }
}

async fn placeholder_page() -> Html<&'static str> {
    Html(PLACEHOLDER_PAGE)
}

/// Shown when the front-end has not been built.
const PLACEHOLDER_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>ENGN-F1 &middot; Quantum Logistics Engine</title>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#05070D;--text:#E6ECFF;--text-muted:#8A93B2;--primary:#4DE1FF;--glass:rgba(255,255,255,.04);--glass-border:rgba(255,255,255,.08);--font:-apple-system,'Segoe UI',sans-serif}
body{font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased;min-height:100vh;display:flex;align-items:center;justify-content:center}
a{color:var(--primary);text-decoration:none}
.card{max-width:560px;margin:24px;padding:40px;background:var(--glass);border:1px solid var(--glass-border);border-radius:20px;text-align:center}
h1{font-size:32px;font-weight:800;letter-spacing:-.02em;margin-bottom:12px}
p{color:var(--text-muted);margin-bottom:8px}
code{font-family:ui-monospace,monospace;background:rgba(77,225,255,.08);padding:2px 6px;border-radius:6px;color:var(--primary)}
ul{list-style:none;margin-top:20px}
li{margin:6px 0}
</style></head>
<body><main class="card">
<h1>ENGN-F1</h1>
<p>The API is running, but no front-end build was found.</p>
<p>Build the client into <code>dist/</code> or point <code>ENGN_STATIC_DIR</code> at it.</p>
<ul>
<li><a href="/api/use-cases">/api/use-cases</a></li>
<li><a href="/api/metrics">/api/metrics</a></li>
</ul>
</main></body></html>
"##;
