//! `urlmatch normalize <url>...` – show canonical forms.

use urlmatch_core::url_model::normalize_url;

pub fn run_normalize(urls: &[String]) {
    for url in urls {
        println!("{}\t{}", url, normalize_url(Some(url)));
    }
}
