/// Validate that a path exists and is a readable directory
pub fn validate_path(path: &std::path::Path) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    // Try to read the directory to check permissions
    std::fs::read_dir(path)
        .map_err(|e| anyhow::anyhow!("Cannot access directory {}: {}", path.display(), e))?;

    Ok(())
}

/// Format a large number with thousands separators
pub fn format_number(num: u64) -> String {
    let s = num.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, *c);
    }

    result
}
