use crate::error::PatchError;
use crate::extensions::ExtensionTable;
use crate::patcher::document::{load_document, write_document};
use crate::patcher::merge::shallow_merge;
use crate::patcher::outcome::{FileOutcome, RunSummary};
use std::path::Path;

/// Directory the OpenAPI generator writes its YAML output to
pub const DEFAULT_BASE_DIR: &str = "force-app/main/default/externalServicesRegistrations";

/// Merges the extension block for `resource_id` into the YAML file at `path`.
///
/// The file is left untouched when the resource has no table entry or when
/// the document cannot be read or parsed.
pub fn apply_extensions(
    table: &ExtensionTable,
    resource_id: &str,
    path: &Path,
) -> Result<(), PatchError> {
    let extension = table
        .get(resource_id)
        .ok_or_else(|| PatchError::UnknownResource {
            resource: resource_id.to_string(),
        })?;

    let overlay = extension.to_overlay().map_err(|e| PatchError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut document = load_document(path)?;
    shallow_merge(&mut document, overlay);
    write_document(path, &document)
}

/// Patches every built-in resource file under the default base directory
pub fn run() -> Result<RunSummary, PatchError> {
    run_in(Path::new(DEFAULT_BASE_DIR))
}

/// Patches every built-in resource file under `base_dir`.
///
/// The only fatal condition is a missing base directory. Per-file problems
/// are reported, tallied, and never abort the run.
pub fn run_in(base_dir: &Path) -> Result<RunSummary, PatchError> {
    if !base_dir.is_dir() {
        return Err(PatchError::MissingBaseDir {
            path: base_dir.to_path_buf(),
        });
    }

    let table = ExtensionTable::builtin();
    let mut summary = RunSummary::default();

    println!("Adding Agentforce extensions to OpenAPI YAML files...");
    println!();

    for resource_id in table.resource_ids() {
        let path = base_dir.join(format!("{resource_id}.yaml"));

        if !path.is_file() {
            println!(
                "⚠ Warning: {} not found. Make sure it has been generated first.",
                path.display()
            );
            summary.record(resource_id, FileOutcome::SkippedMissing);
            continue;
        }

        match apply_extensions(&table, resource_id, &path) {
            Ok(()) => {
                println!("✓ Added x-sfdc extensions to {}", path.display());
                summary.record(resource_id, FileOutcome::Patched);
            }
            Err(e @ PatchError::UnknownResource { .. }) => {
                println!("⚠ Warning: {e}");
                summary.record(resource_id, FileOutcome::SkippedUnknown);
            }
            Err(e) => {
                eprintln!("✗ Error processing {}: {e}", path.display());
                summary.record(resource_id, FileOutcome::Failed);
            }
        }
    }

    println!();
    if summary.all_patched() {
        println!(
            "✓ Successfully added extensions to all {} files!",
            summary.patched()
        );
        println!("You can now deploy the OpenAPI specs to your org.");
    } else {
        println!(
            "⚠ Processed {} out of {} files.",
            summary.patched(),
            summary.total()
        );
        println!("Make sure all YAML files have been generated first.");
    }

    Ok(summary)
}
