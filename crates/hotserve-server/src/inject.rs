//! Markup injector.
//!
//! Inserts the polling client script into an HTML document before the
//! first closing head tag, or prepends it when the document has no head.
//!
//! This is a deliberate substring heuristic, not an HTML parse: a
//! `</head>` inside a comment or string, a second occurrence, or a
//! case-variant spelling are all taken at face value. Upgrading to a real
//! parser would change behavior on malformed documents, so the heuristic
//! stays.

/// Case-sensitive marker the script is inserted before.
const HEAD_CLOSE: &str = "</head>";

/// The polling client. Runs in the browser and drives the reload cycle:
/// it keeps a `lastModified` map per page load, polls the snapshot
/// endpoint every second (first poll after 100 ms), and reloads the page
/// when a previously recorded timestamp differs from the served one.
/// Comparison stops at the first mismatch; poll failures are swallowed
/// and the next scheduled poll proceeds as normal.
const RELOAD_SCRIPT: &str = r"<script>
    let lastModified = {};

    function checkForUpdates() {
        fetch('/api/check-updates')
            .then((response) => response.json())
            .then((data) => {
                let needsReload = false;
                for (const [file, modified] of Object.entries(data)) {
                    if (lastModified[file] && lastModified[file] !== modified) {
                        needsReload = true;
                        break;
                    }
                    lastModified[file] = modified;
                }
                if (needsReload) {
                    console.log('hotserve: files changed, reloading');
                    window.location.reload();
                }
            })
            .catch(() => {});
    }

    setInterval(checkForUpdates, 1000);
    setTimeout(checkForUpdates, 100);
</script>";

/// Inject the polling client into an HTML document.
///
/// The script block is inserted immediately before the first occurrence
/// of `</head>`. Documents without a closing head tag get the script
/// prepended instead, so the reload capability is present even in
/// malformed documents. Never fails.
pub(crate) fn inject(html: &str) -> String {
    match html.find(HEAD_CLOSE) {
        Some(pos) => {
            let mut out = String::with_capacity(html.len() + RELOAD_SCRIPT.len() + 1);
            out.push_str(&html[..pos]);
            out.push_str(RELOAD_SCRIPT);
            out.push('\n');
            out.push_str(&html[pos..]);
            out
        }
        None => format!("{RELOAD_SCRIPT}\n{html}"),
    }
}
