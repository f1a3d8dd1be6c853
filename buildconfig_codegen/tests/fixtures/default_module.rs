
/// Macro used to name a path in the objdir for use with macros like `include!`
#[macro_export]
macro_rules! objdir_path {
    ($path:literal) => {
        concat!("/obj/", $path)
    }
}

/// Macro used to name a path in the srcdir for use with macros like `include!`
#[macro_export]
macro_rules! srcdir_path {
    ($path:literal) => {
        concat!("/src/", $path)
    }
}

/// The objdir path for use in build scripts
pub const TOPOBJDIR: &str = "/obj";
/// The srcdir path for use in build scripts
pub const TOPSRCDIR: &str = "/src";

pub const MOZ_MACBUNDLE_ID: &str = "org\u{2e}mozilla\u{2e}demo";
pub const MOZ_APP_BASENAME: &str = "";
pub const MOZ_APP_NAME: &str = "Demo App";
pub const MOZ_APP_VENDOR: &str = "He said \"hi\"\\";
pub const MOZ_FOLD_LIBS: bool = false;
pub const NIGHTLY_BUILD: bool = true;
pub const RELEASE_OR_BETA: bool = false;
pub const EARLY_BETA_OR_EARLIER: bool = true;
pub const MOZ_DEV_EDITION: bool = false;
pub const MOZ_ESR: bool = false;
pub const MOZ_DIAGNOSTIC_ASSERT_ENABLED: bool = false;
pub const MOZ_CRASHREPORTER_MOCK: bool = false;
pub const BINDGEN_SYSTEM_FLAGS: [&str; 0] = [];
pub const MOZ_GTK3_CFLAGS: [&str; 0] = [];
pub const MOZ_GTK3_LIBS: [&str; 0] = [];
pub const NSPR_CFLAGS: [&str; 3] = ["-I/usr/include/nspr4","-DA\u{3d}1","-DB"];
pub const NSS_CFLAGS: [&str; 0] = [];
pub const MOZ_PIXMAN_CFLAGS: [&str; 0] = [];
pub const MOZ_ICU_CFLAGS: [&str; 0] = [];
