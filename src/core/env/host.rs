use super::EnvError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub model: String,
    pub speed_mhz: f64,
}

impl CpuInfo {
    pub fn speed_ghz(&self) -> f64 {
        self.speed_mhz / 1000.0
    }
}

pub fn eol() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

pub fn home_dir() -> Result<PathBuf, EnvError> {
    dirs::home_dir().ok_or(EnvError::HomeDirNotFound)
}

/// CPU architecture using the short names people expect from `uname`-style tools.
pub fn architecture() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        "loongarch64" => "loong64",
        other => other,
    }
}

/// One entry per logical CPU.
pub fn cpus() -> Vec<CpuInfo> {
    let parsed = std::fs::read_to_string("/proc/cpuinfo")
        .map(|text| parse_cpuinfo(&text))
        .unwrap_or_default();
    if !parsed.is_empty() {
        return parsed;
    }

    let count = std::thread::available_parallelism().map_or(1, |n| n.get());
    vec![
        CpuInfo {
            model: "unknown".to_string(),
            speed_mhz: 0.0,
        };
        count
    ]
}

fn parse_cpuinfo(text: &str) -> Vec<CpuInfo> {
    let mut cpus = Vec::new();

    for block in text.split("\n\n") {
        if !block.lines().any(|line| line.starts_with("processor")) {
            continue;
        }

        let mut model = None;
        let mut speed = 0.0;
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            match key.trim() {
                "model name" | "Processor" | "cpu model" => model = Some(value.trim().to_string()),
                "cpu MHz" => speed = value.trim().parse().unwrap_or(0.0),
                _ => {}
            }
        }

        cpus.push(CpuInfo {
            model: model.unwrap_or_else(|| "unknown".to_string()),
            speed_mhz: speed,
        });
    }

    cpus
}

#[cfg(unix)]
pub fn username() -> Result<String, EnvError> {
    use std::ffi::CStr;

    let uid = unsafe { libc::getuid() };
    let mut passwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();
    let mut buffer: Vec<libc::c_char> = vec![0; 1024];

    loop {
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &mut passwd,
                buffer.as_mut_ptr(),
                buffer.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buffer.len() < 1 << 16 {
            buffer.resize(buffer.len() * 2, 0);
            continue;
        }

        if rc != 0 || result.is_null() || passwd.pw_name.is_null() {
            return username_from_env();
        }

        let name = unsafe { CStr::from_ptr(passwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

#[cfg(not(unix))]
pub fn username() -> Result<String, EnvError> {
    username_from_env()
}

fn username_from_env() -> Result<String, EnvError> {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .ok_or(EnvError::UserNotFound)
}
