//! Reporting styles: how a generated wrapper reports a failed condition.

use clap::ValueEnum;

/// The closed set of generator modes, selected by the first CLI token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportingStyle {
    /// Fail the test immediately (`t.Fatalf`)
    Assert,
    /// Record the failure and keep running (`t.Errorf`)
    Expect,
}

impl ReportingStyle {
    /// Go package name of the generated file, also used as its file stem.
    pub fn package_name(self) -> &'static str {
        match self {
            ReportingStyle::Assert => "assert",
            ReportingStyle::Expect => "expect",
        }
    }

    /// Label prefixed to every failure message.
    pub fn error_category(self) -> &'static str {
        match self {
            ReportingStyle::Assert => "AssertFailed",
            ReportingStyle::Expect => "ExpectFailed",
        }
    }

    /// The `testing.T` method invoked on failure.
    pub fn testing_call(self) -> &'static str {
        match self {
            ReportingStyle::Assert => "t.Fatalf",
            ReportingStyle::Expect => "t.Errorf",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportingStyle::Assert => "fail immediately",
            ReportingStyle::Expect => "record and continue",
        }
    }

    /// Name of the generated file: `<package>.go`.
    pub fn file_name(self) -> String {
        format!("{}.go", self.package_name())
    }
}
