use crate::survey::vocab::{PODCAST_FORMATS, TOPICS};

pub fn list_options() {
    println!("Topics:");
    for t in TOPICS {
        println!("  - {t}");
    }
    println!("\nPodcast formats:");
    for f in PODCAST_FORMATS {
        println!("  - {f}");
    }
}
