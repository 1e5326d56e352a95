//! CLI result presenter.

use std::io::{self, Write};

use serde_json::json;

use fourier_core::complex::Complex;
use fourier_core::strategy::ProductResult;

use crate::output::{
    format_complex_list, format_list, format_polynomial, format_real_list, OutputFormat,
};
use crate::ui::{header, label};

/// Renders transform, product, and spectrum results in the selected format.
#[derive(Debug, Clone)]
pub struct Presenter {
    format: OutputFormat,
    quiet: bool,
    decimals: usize,
}

impl Presenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool, decimals: usize) -> Self {
        Self {
            format,
            quiet,
            decimals,
        }
    }

    /// Present a forward or inverse transform.
    pub fn present_transform(
        &self,
        out: &mut dyn Write,
        operation: &str,
        input: &[Complex],
        output: &[Complex],
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let doc = json!({
                "operation": operation,
                "input": input,
                "output": output,
                "padded": output.len() != input.len(),
            });
            return write_json(out, &doc);
        }

        let rendered = format_complex_list(output, self.decimals);
        if self.quiet {
            return writeln!(out, "{rendered}");
        }

        writeln!(out, "{}", header(operation))?;
        writeln!(out, "{} {}", label("Input: "), format_complex_list(input, self.decimals))?;
        writeln!(out, "{} {rendered}", label("Output:"))?;
        if output.len() != input.len() {
            writeln!(
                out,
                "{} input padded from {} to {} values",
                label("Note:  "),
                input.len(),
                output.len()
            )?;
        }
        Ok(())
    }

    /// Present polynomial products from one or more strategies.
    pub fn present_products(
        &self,
        out: &mut dyn Write,
        p: &[f64],
        q: &[f64],
        results: &[ProductResult],
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let doc = json!({
                "first": p,
                "second": q,
                "products": results,
            });
            return write_json(out, &doc);
        }

        if self.quiet {
            for result in results {
                writeln!(out, "{}", format_list(&result.coefficients))?;
            }
            return Ok(());
        }

        writeln!(out, "{}", header("Polynomial multiplication"))?;
        writeln!(
            out,
            "{} {}  ({})",
            label("First polynomial: "),
            format_list(p),
            format_polynomial(p)
        )?;
        writeln!(
            out,
            "{} {}  ({})",
            label("Second polynomial:"),
            format_list(q),
            format_polynomial(q)
        )?;
        for result in results {
            writeln!(
                out,
                "{} {}  ({})",
                label(&format!("Product [{}]:", result.algorithm)),
                format_list(&result.coefficients),
                format_polynomial(&result.coefficients)
            )?;
        }
        Ok(())
    }

    /// Present a sampled signal and its magnitude spectrum.
    pub fn present_spectrum(
        &self,
        out: &mut dyn Write,
        signal: &[f64],
        magnitudes: &[f64],
    ) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let doc = json!({
                "signal": signal,
                "magnitudes": magnitudes,
            });
            return write_json(out, &doc);
        }

        if self.quiet {
            return writeln!(out, "{}", format_real_list(magnitudes, self.decimals));
        }

        writeln!(out, "{}", header("Frequency analysis"))?;
        writeln!(out, "Signal samples:")?;
        for (i, s) in signal.iter().enumerate() {
            writeln!(out, "  t[{i}] = {s:.prec$}", prec = self.decimals)?;
        }
        writeln!(out, "Frequency spectrum (magnitudes):")?;
        for (i, m) in magnitudes.iter().enumerate() {
            writeln!(out, "  F[{i}] = {m:.prec$}", prec = self.decimals)?;
        }
        Ok(())
    }
}

fn write_json(out: &mut dyn Write, doc: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, doc)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_products() -> Vec<ProductResult> {
        vec![ProductResult {
            algorithm: "FFT".into(),
            coefficients: vec![2.0, 7.0, 15.0, 14.0, 4.0],
        }]
    }

    #[test]
    fn transform_quiet_prints_only_output() {
        let presenter = Presenter::new(OutputFormat::Text, true, 1);
        let input = [Complex::ONE, Complex::ONE];
        let output = [Complex::new(2.0, 0.0), Complex::ZERO];
        let text = render(|out| presenter.present_transform(out, "FFT", &input, &output));
        assert_eq!(text.trim(), "[2.0 + 0.0i, 0.0 + 0.0i]");
    }

    #[test]
    fn transform_text_notes_padding() {
        let presenter = Presenter::new(OutputFormat::Text, false, 2);
        let input = [Complex::ONE; 3];
        let output = [Complex::ZERO; 4];
        let text = render(|out| presenter.present_transform(out, "FFT", &input, &output));
        assert!(text.contains("padded from 3 to 4"));
    }

    #[test]
    fn transform_json_shape() {
        let presenter = Presenter::new(OutputFormat::Json, false, 2);
        let input = [Complex::ONE];
        let text = render(|out| presenter.present_transform(out, "IFFT", &input, &input));
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["operation"], "IFFT");
        assert_eq!(doc["output"][0]["re"], 1.0);
        assert_eq!(doc["padded"], false);
    }

    #[test]
    fn products_text_renders_polynomials() {
        let presenter = Presenter::new(OutputFormat::Text, false, 2);
        let text = render(|out| {
            presenter.present_products(out, &[2.0, 3.0, 1.0], &[1.0, 2.0, 4.0], &sample_products())
        });
        assert!(text.contains("[2, 7, 15, 14, 4]"));
        assert!(text.contains("4x^4 + 14x^3 + 15x^2 + 7x + 2"));
    }

    #[test]
    fn products_quiet_and_json() {
        let quiet = Presenter::new(OutputFormat::Text, true, 2);
        let text = render(|out| quiet.present_products(out, &[1.0], &[1.0], &sample_products()));
        assert_eq!(text.trim(), "[2, 7, 15, 14, 4]");

        let json = Presenter::new(OutputFormat::Json, false, 2);
        let text = render(|out| json.present_products(out, &[1.0], &[1.0], &sample_products()));
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["products"][0]["algorithm"], "FFT");
        assert_eq!(doc["products"][0]["coefficients"][2], 15.0);
    }

    #[test]
    fn spectrum_text_table() {
        let presenter = Presenter::new(OutputFormat::Text, false, 3);
        let text = render(|out| presenter.present_spectrum(out, &[0.0, 1.0], &[1.0, 1.0]));
        assert!(text.contains("t[1] = 1.000"));
        assert!(text.contains("F[0] = 1.000"));
    }
}
