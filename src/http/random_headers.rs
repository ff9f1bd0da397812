use rand::Rng;
use rand::seq::IndexedRandom;

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformInfo {
    pub user_agent_platform: &'static str,
    pub sec_ch_ua_platform: &'static str,
    pub is_mobile: bool,
}

const PLATFORMS: [PlatformInfo; 3] = [
    PlatformInfo {
        user_agent_platform: "Windows NT 10.0; Win64; x64",
        sec_ch_ua_platform: "Windows",
        is_mobile: false,
    },
    PlatformInfo {
        user_agent_platform: "Macintosh; Intel Mac OS X 10_15_7",
        sec_ch_ua_platform: "macOS",
        is_mobile: false,
    },
    PlatformInfo {
        user_agent_platform: "X11; Linux x86_64",
        sec_ch_ua_platform: "Linux",
        is_mobile: false,
    },
];

/// Sent when rotation is off, together with `DEFAULT_PLATFORM`.
pub const DEFAULT_PLATFORM: &PlatformInfo = &PLATFORMS[2];
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";

// Desktop only: mobile layouts drop the syllabus block.
pub fn get_random_platform_info() -> PlatformInfo {
    let mut rng = rand::rng();
    PLATFORMS
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| PLATFORMS[0].clone())
}

pub fn get_random_user_agent(platform_info: &PlatformInfo) -> String {
    let mut rng = rand::rng();

    let browser = match rng.random_range(0..3) {
        0 => format!(
            "Chrome/{}.0.0.0 Safari/537.36",
            110 + rng.random_range(0..26)
        ),
        1 => format!("Firefox/{}.0", 115 + rng.random_range(0..22)),
        _ => format!(
            "Chrome/{0}.0.0.0 Safari/537.36 Edg/{0}.0.0.0",
            110 + rng.random_range(0..26)
        ),
    };

    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) {}",
        platform_info.user_agent_platform, browser
    )
}
