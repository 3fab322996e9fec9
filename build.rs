use std::env;

const FALLBACK_API_URL: &str = "http://localhost:5000/api/extract";

fn main() {
    // 抽出APIのデフォルトURLをビルド時に埋め込む
    let api_url = match env::var("OUTREACH_API_URL") {
        Ok(url) if !url.trim().is_empty() => {
            println!("cargo:warning=OUTREACH_API_URL set to {}", url);
            url
        }
        _ => FALLBACK_API_URL.to_string(),
    };
    println!("cargo:rustc-env=OUTREACH_DEFAULT_API_URL={}", api_url);

    // 環境変数変更時に再ビルド
    println!("cargo:rerun-if-env-changed=OUTREACH_API_URL");
}
