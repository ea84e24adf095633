#![doc = r#"
sitekit — batch maintenance passes for a static website.

Three independent passes, each a linear walk over a fixed file set:

- **resize**: bring every icon in a directory to the pixel size of a reference
  image, keeping aspect ratio, optionally trimming near-white/transparent
  borders first, and centering the result on a white (or transparent, for PNG)
  canvas.
- **rename**: rename certificate scans from `YYYYMMDD-<id>.<ext>` to
  `YYYYMMDD.<ext>` without ever overwriting an existing file.
- **rewrite**: apply a regular-expression substitution to CSS files, e.g. point
  every `border-radius` at a shared variable.

Every pass logs per-file decisions through `tracing`, keeps going when a single
file fails, and returns a serializable report.

Normalize icons
---------------
```rust,no_run
use std::path::Path;
use sitekit::{normalize_directory, ResizeParams};

fn main() -> sitekit::Result<()> {
    let params = ResizeParams {
        reference: Some("reference.jpg".into()),
        trim: true,
        ..Default::default()
    };
    let report = normalize_directory(Path::new("images/icons"), &params)?;
    println!("resized={} skipped={} errors={}", report.resized, report.skipped, report.errors);
    Ok(())
}
```

Rename certificates
-------------------
```rust,no_run
use std::path::Path;
use sitekit::{rename_certificates, RenameParams};

fn main() -> sitekit::Result<()> {
    let report = rename_certificates(Path::new("images/certificates"), &RenameParams::default())?;
    for (from, to) in &report.renames {
        println!("{from} -> {to}");
    }
    Ok(())
}
```

Rewrite CSS
-----------
```rust
use sitekit::{RewriteRule, RewriteRuleKind};

fn main() -> sitekit::Result<()> {
    let rule = RewriteRule::builtin(RewriteRuleKind::BorderRadius, None)?;
    let out = rule.apply(".card { border-radius: 6px; }");
    assert_eq!(out.content, ".card { border-radius: var(--border-radius-md); }");
    Ok(())
}
```

Error handling
--------------
All public functions return `sitekit::Result<T>`; match on `sitekit::Error` to
handle specific cases such as a missing reference image.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use api::{
    ImageOutcome, RenameReport, ResizeReport, RewriteReport, normalize_directory,
    normalize_image_file, rename_certificates, rewrite_file, rewrite_files, rewrite_with_params,
    select_files,
};
pub use crate::core::params::{RenameParams, ResizeParams, RewriteParams, RewriteRuleSpec, load_params};
pub use crate::core::rename::CertificateName;
pub use crate::core::rewrite::RewriteRule;
pub use error::{Error, Result};
pub use types::{Dimensions, ImageKind, ResizeFilter, RewriteRuleKind};
