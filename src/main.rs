use std::{fs, path::Path};

//
// cargo run -- page.png page-bw.png 4
// cargo run -- page.png page.bin 2
//
use log::info;
use thermal_raster::{Config, Error, Image, PaperWidth, Rasterizer};

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let paper = match args.get(3) {
        Some(arg) => match arg.parse::<PaperWidth>() {
            Ok(paper) => paper,
            Err(msg) => {
                eprintln!("Error: {}", msg);
                print_usage();
                std::process::exit(2);
            }
        },
        None => PaperWidth::default(),
    };

    if let Err(err) = run(Path::new(&args[1]), Path::new(&args[2]), paper) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: thermal-raster <INPUT> <OUTPUT> [PAPER]");
    println!("  INPUT    page image (png, jpeg, ...)");
    println!("  OUTPUT   black and white preview image, or packed raster lines if it ends in .bin");
    println!("  PAPER    roll width in inches: 2 (384 dots), 3 (576 dots), 4 (832 dots, default)");
}

fn run(input: &Path, output: &Path, paper: PaperWidth) -> Result<(), Error> {
    let page = Image::from(image::open(input)?.to_rgb8());
    info!("loaded {} ({}x{})", input.display(), page.width(), page.height());

    let rasterizer = Rasterizer::new(Config::new(paper));
    let rows = rasterizer.render(&page)?;

    let is_raw = output
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("bin"));

    if is_raw {
        fs::write(output, rows.concat())?;
    } else {
        preview(&rows, paper.dots()).save(output)?;
    }

    info!("wrote {} raster lines to {}", rows.len(), output.display());
    Ok(())
}

/// Unpack raster lines back into a grayscale image for inspection.
fn preview(rows: &[Vec<u8>], dots: u32) -> image::GrayImage {
    image::GrayImage::from_fn(dots, rows.len() as u32, |x, y| {
        let byte = rows[y as usize][x as usize / 8];
        if byte & (0x80 >> (x % 8)) != 0 {
            image::Luma([0])
        } else {
            image::Luma([255])
        }
    })
}
