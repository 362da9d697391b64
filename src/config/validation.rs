//! Configuration validation for book-packer

use std::path::Path;

use crate::config::PackerConfig;
use crate::core::errors::ConfigError;

/// Hard errors in configuration values
pub(crate) fn field_errors(config: &PackerConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let capacity = config.packing.capacity;

    if !capacity.is_finite() || capacity <= 0.0 {
        errors.push(ConfigError::InvalidValue {
            field: "packing.capacity".to_string(),
            value: capacity.to_string(),
            reason: "Must be a finite number greater than 0".to_string(),
        });
    }

    if config.extraction.data_dir.as_os_str().is_empty() {
        errors.push(ConfigError::InvalidValue {
            field: "extraction.data_dir".to_string(),
            value: String::new(),
            reason: "Must not be empty".to_string(),
        });
    }

    if config.export.output_file.as_os_str().is_empty() {
        errors.push(ConfigError::InvalidValue {
            field: "export.output_file".to_string(),
            value: String::new(),
            reason: "Must not be empty".to_string(),
        });
    }

    if config.export.indent == 0 || config.export.indent > 16 {
        errors.push(ConfigError::InvalidValue {
            field: "export.indent".to_string(),
            value: config.export.indent.to_string(),
            reason: "Must be between 1 and 16".to_string(),
        });
    }

    errors
}

/// Checks a loaded configuration against the environment it will run in
pub struct ConfigValidator<'a> {
    config: &'a PackerConfig,
    config_path: Option<&'a Path>,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(config: &'a PackerConfig) -> Self {
        Self {
            config,
            config_path: None,
        }
    }

    pub fn with_config_path(mut self, path: &'a Path) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Perform full configuration validation
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        match self.config_path {
            Some(path) => report.add_info(format!("Configuration file: {}", path.display())),
            None => report.add_info("No configuration file, using defaults".to_string()),
        }

        let errors = field_errors(self.config);
        if errors.is_empty() {
            report.add_success(format!(
                "Box capacity is {} pounds",
                self.config.packing.capacity
            ));
        }
        for error in errors {
            report.add_error(error);
        }

        self.validate_data_dir(&mut report);
        self.validate_output_file(&mut report);

        report
    }

    fn validate_data_dir(&self, report: &mut ValidationReport) {
        let dir = &self.config.extraction.data_dir;
        if !dir.is_dir() {
            report.add_warning(format!(
                "Data directory {} does not exist yet",
                dir.display()
            ));
            return;
        }

        match std::fs::read_dir(dir) {
            Ok(entries) => {
                let pages = entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().is_file())
                    .count();
                if pages == 0 {
                    report.add_warning(format!("Data directory {} is empty", dir.display()));
                } else {
                    report.add_success(format!(
                        "Data directory {} holds {pages} page(s)",
                        dir.display()
                    ));
                }
            }
            Err(e) => report.add_error(ConfigError::ValidationFailed {
                reason: format!("Data directory {} is not readable: {e}", dir.display()),
            }),
        }
    }

    fn validate_output_file(&self, report: &mut ValidationReport) {
        let output = &self.config.export.output_file;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                report.add_error(ConfigError::ValidationFailed {
                    reason: format!("Output directory {} does not exist", parent.display()),
                });
                return;
            }
        }
        if output.exists() {
            report.add_info(format!("Output file {} will be overwritten", output.display()));
        }
    }
}

/// Validation report containing all findings
#[derive(Debug)]
pub struct ValidationReport {
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
    pub successes: Vec<String>,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            info: Vec::new(),
            successes: Vec::new(),
        }
    }

    fn add_error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    fn add_info(&mut self, info: String) {
        self.info.push(info);
    }

    fn add_success(&mut self, success: String) {
        self.successes.push(success);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn print_summary(&self) {
        println!("Configuration Validation Report");
        println!("==============================");

        if !self.successes.is_empty() {
            println!("\n✅ Successes:");
            for success in &self.successes {
                println!("   {success}");
            }
        }

        if !self.info.is_empty() {
            println!("\nℹ️  Information:");
            for info in &self.info {
                println!("   {info}");
            }
        }

        if !self.warnings.is_empty() {
            println!("\n⚠️  Warnings:");
            for warning in &self.warnings {
                println!("   {warning}");
            }
        }

        if !self.errors.is_empty() {
            println!("\n❌ Errors:");
            for error in &self.errors {
                println!("   {error}");
            }
        }

        println!(
            "\nSummary: {} errors, {} warnings",
            self.errors.len(),
            self.warnings.len()
        );
    }
}
