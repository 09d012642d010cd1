use qrcode::{Color, QrCode};
use thermal_raster::{to_monochrome, Config, Image, Mono, PaperWidth, Rasterizer};

const MODULE: u32 = 4;

/// QR code rendered as a color image with `MODULE` pixels per module.
fn qr_page(payload: &str) -> (QrCode, Image) {
    let code = QrCode::new(payload.as_bytes()).unwrap();
    let colors = code.to_colors();
    let modules = code.width() as u32;
    let size = modules * MODULE;

    let mut data = Vec::with_capacity((size * size * 3) as usize);
    for y in 0..size {
        for x in 0..size {
            let idx = ((y / MODULE) * modules + x / MODULE) as usize;
            let rgb = match colors[idx] {
                Color::Dark => [20, 24, 30],
                Color::Light => [240, 236, 228],
            };
            data.extend_from_slice(&rgb);
        }
    }

    (code, Image::from_rgb(size, size, data).unwrap())
}

#[test]
fn qr_code_survives_monochrome_conversion() {
    let (code, page) = qr_page("INV-2024-00017");
    let colors = code.to_colors();
    let modules = code.width() as u32;

    let mono = to_monochrome(&page);
    assert_eq!(mono.dimensions(), page.dimensions());

    for my in 0..modules {
        for mx in 0..modules {
            let expected = match colors[(my * modules + mx) as usize] {
                Color::Dark => Mono::Black,
                Color::Light => Mono::White,
            };
            assert_eq!(mono.pixel(mx * MODULE + 1, my * MODULE + 1), expected);
        }
    }
}

#[test]
fn qr_code_packs_onto_two_inch_paper() {
    let (code, page) = qr_page("receipt 42");
    let modules = code.width() as u32;
    let config = Config::new(PaperWidth::TwoInch).scale_to_paper(false);
    let rows = Rasterizer::new(config).render(&page).unwrap();

    assert_eq!(rows.len() as u32, modules * MODULE);
    assert!(rows.iter().all(|row| row.len() == 48));

    // finder pattern corner is dark
    assert_eq!(rows[0][0] & 0x80, 0x80);
    // nothing printed beyond the code
    let used = ((modules * MODULE + 7) / 8) as usize;
    assert!(rows.iter().all(|row| row[used..].iter().all(|&b| b == 0)));
}

#[test]
fn concurrent_rendering_matches_sequential() {
    let (_, page) = qr_page("shared page");
    let rasterizer = Rasterizer::new(Config::new(PaperWidth::ThreeInch));
    let expected = rasterizer.render(&page).unwrap();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| rasterizer.render(&page).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|rows| *rows == expected));
}
