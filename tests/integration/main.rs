use once_cell::sync::Lazy;
use rgb::{FromSlice, RGBA8};

mod cli;

const IMAGE_SIZE: u32 = 512;

const BACKGROUND: RGBA8 = RGBA8 {
    r: 0x10,
    g: 0x00,
    b: 0x25,
    a: 255,
};

const STROKE: RGBA8 = RGBA8 {
    r: 0xb3,
    g: 0x88,
    b: 0xff,
    a: 255,
};

/// The default icon rendered once and shared between tests.
static ICON_PNG: Lazy<Vec<u8>> = Lazy::new(|| {
    let dir = tempdir::TempDir::new("favicon-gen").unwrap();
    let png_path = dir.path().join("favicon.png");
    favicon_gen::generate(
        "tests/fixtures/icon.svg",
        &png_path,
        &favicon_gen::Options::default(),
    )
    .unwrap();
    std::fs::read(png_path).unwrap()
});

pub struct Image {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Image {
    pub fn pixel(&self, x: u32, y: u32) -> RGBA8 {
        self.data.as_rgba()[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[RGBA8] {
        self.data.as_rgba()
    }
}

pub fn render_fixture(name: &str) -> Image {
    let dir = tempdir::TempDir::new("favicon-gen").unwrap();
    let png_path = dir.path().join("favicon.png");
    favicon_gen::generate(
        format!("tests/fixtures/{}.svg", name),
        &png_path,
        &favicon_gen::Options::default(),
    )
    .unwrap();
    load_png(&std::fs::read(png_path).unwrap())
}

pub fn load_png(data: &[u8]) -> Image {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().unwrap();
    let mut img_data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut img_data).unwrap();

    match info.color_type {
        png::ColorType::Rgba => {}
        _ => panic!("{:?} PNG is not supported.", info.color_type),
    }

    img_data.truncate(info.buffer_size());

    Image {
        width: info.width,
        height: info.height,
        data: img_data,
    }
}

fn is_pix_diff(c1: RGBA8, c2: RGBA8) -> bool {
    (c1.r as i32 - c2.r as i32).abs() > 1
        || (c1.g as i32 - c2.g as i32).abs() > 1
        || (c1.b as i32 - c2.b as i32).abs() > 1
        || (c1.a as i32 - c2.a as i32).abs() > 1
}
