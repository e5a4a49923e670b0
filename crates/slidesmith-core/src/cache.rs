use std::{
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
};

fn hash_key(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("slidesmith")
}

/// Get the cache directory for a given topic
pub fn get_cache_dir(topic: &str) -> PathBuf {
    get_root_cache_dir().join(hash_key(topic).to_string())
}

/// Get the path for the cached script text (user-editable between runs)
pub fn get_script_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("script.md")
}

/// Get the path for a cached image URL list (query aware)
pub fn get_images_path(cache_dir: &Path, query: &str) -> PathBuf {
    cache_dir.join(format!("images_{}.json", hash_key(query)))
}

/// Get the path for the cached slideshow manifest
pub fn get_manifest_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("slideshow.json")
}
