use super::*;
use crate::foundation::color::Color;

#[derive(Debug, Default)]
struct MockSurface {
    natural: (u32, u32),
    decode_fails: bool,
    draw_fails: bool,
    draws: Vec<(f64, f64, f64, f64)>,
    styles: Vec<TextStyle>,
    texts: Vec<(String, f64, f64)>,
}

fn mock(natural: (u32, u32)) -> MockSurface {
    MockSurface {
        natural,
        ..MockSurface::default()
    }
}

struct MockImage {
    width: u32,
    height: u32,
}

impl DecodedImage for MockImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Surface for MockSurface {
    type Image = MockImage;

    fn width(&self) -> u32 {
        500
    }

    fn height(&self) -> u32 {
        500
    }

    fn fill(&mut self, _color: Color) {}

    fn decode_image(&self, _bytes: &[u8]) -> StillframeResult<Self::Image> {
        if self.decode_fails {
            return Err(anyhow::anyhow!("malformed image data").into());
        }
        Ok(MockImage {
            width: self.natural.0,
            height: self.natural.1,
        })
    }

    fn draw_image(
        &mut self,
        _image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> StillframeResult<()> {
        if self.draw_fails {
            return Err(anyhow::anyhow!("draw rejected").into());
        }
        self.draws.push((x, y, width, height));
        Ok(())
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        self.styles.push(style.clone());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> StillframeResult<()> {
        self.texts.push((text.to_string(), x, y));
        Ok(())
    }

    fn encode(&self) -> StillframeResult<Vec<u8>> {
        Ok(vec![0])
    }
}

struct BytesFetcher(Vec<u8>);

impl Fetch for BytesFetcher {
    async fn fetch(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

struct FailingFetcher;

impl Fetch for FailingFetcher {
    async fn fetch(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

fn png_stub() -> BytesFetcher {
    BytesFetcher(vec![1, 2, 3])
}

#[tokio::test]
async fn no_surface_fails_with_missing_context() {
    let err = apply_image::<MockSurface, _>(None, &ImageLayer::new("http://x"), &png_stub())
        .await
        .unwrap_err();
    assert!(matches!(err, StillframeError::MissingContext));
}

#[tokio::test]
async fn missing_url_fails_before_fetching() {
    let err = apply_image(Some(mock((1, 1))), &ImageLayer::default(), &FailingFetcher)
        .await
        .unwrap_err();
    assert!(matches!(err, StillframeError::MissingImageUrl));
}

#[tokio::test]
async fn fetch_failure_propagates_with_source() {
    let err = apply_image(Some(mock((1, 1))), &ImageLayer::new("http://x"), &FailingFetcher)
        .await
        .unwrap_err();
    assert!(matches!(err, StillframeError::Fetch(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn decode_failure_is_image_import() {
    let mut surface = mock((1, 1));
    surface.decode_fails = true;
    let err = apply_image(Some(surface), &ImageLayer::new("http://x"), &png_stub())
        .await
        .unwrap_err();
    assert!(matches!(err, StillframeError::ImageImport));
}

#[tokio::test]
async fn draw_failure_is_image_import() {
    let mut surface = mock((1, 1));
    surface.draw_fails = true;
    let err = apply_image(Some(surface), &ImageLayer::new("http://x"), &png_stub())
        .await
        .unwrap_err();
    assert!(matches!(err, StillframeError::ImageImport));
}

#[tokio::test]
async fn natural_size_used_when_unspecified() {
    let surface = apply_image(Some(mock((400, 100))), &ImageLayer::new("http://x"), &png_stub())
        .await
        .unwrap();
    assert_eq!(surface.draws, [(0.0, 0.0, 400.0, 100.0)]);
}

#[tokio::test]
async fn width_only_locks_aspect_ratio() {
    let layer = ImageLayer::new("http://x").with_width(200);
    let surface = apply_image(Some(mock((400, 100))), &layer, &png_stub())
        .await
        .unwrap();
    assert_eq!(surface.draws, [(0.0, 0.0, 200.0, 50.0)]);
}

#[tokio::test]
async fn height_only_locks_aspect_ratio() {
    let layer = ImageLayer::new("http://x").with_height(50);
    let surface = apply_image(Some(mock((400, 100))), &layer, &png_stub())
        .await
        .unwrap();
    assert_eq!(surface.draws, [(0.0, 0.0, 200.0, 50.0)]);
}

#[tokio::test]
async fn both_dimensions_used_verbatim() {
    let layer = ImageLayer::new("http://x").with_width(10).with_height(300);
    let surface = apply_image(Some(mock((400, 100))), &layer, &png_stub())
        .await
        .unwrap();
    assert_eq!(surface.draws, [(0.0, 0.0, 10.0, 300.0)]);
}

#[tokio::test]
async fn zero_dimension_behaves_as_absent() {
    let mut layer = ImageLayer::new("http://x");
    layer.width = Some(0);
    let surface = apply_image(Some(mock((400, 100))), &layer, &png_stub())
        .await
        .unwrap();
    assert_eq!(surface.draws, [(0.0, 0.0, 400.0, 100.0)]);
}

#[tokio::test]
async fn position_is_passed_through() {
    let layer = ImageLayer::new("http://x").at(7, -9);
    let surface = apply_image(Some(mock((2, 2))), &layer, &png_stub())
        .await
        .unwrap();
    assert_eq!(surface.draws, [(7.0, -9.0, 2.0, 2.0)]);
}

#[test]
fn missing_text_fails() {
    let err = apply_text(mock((1, 1)), &TextLayer::default()).unwrap_err();
    assert!(matches!(err, StillframeError::MissingText));
}

#[test]
fn empty_text_is_a_real_value() {
    // Only a truly absent `text` is an error; "" draws (to no visible effect).
    let surface = apply_text(mock((1, 1)), &TextLayer::new("")).unwrap();
    assert_eq!(surface.texts, [(String::new(), 0.0, 0.0)]);
}

#[test]
fn default_text_builds_quirky_font_spec() {
    let surface = apply_text(mock((1, 1)), &TextLayer::new("Hi")).unwrap();

    // The default "50px" size picks up a second literal "px" suffix; that is
    // the long-standing wire behavior and surfaces parse the leading integer.
    let style = &surface.styles[0];
    assert_eq!(style.font, "normal 50pxpx \"Arial\"");
    assert_eq!(style.fill, "white");
    assert_eq!(style.align, crate::composition::model::TextAlign::Left);
    assert_eq!(style.baseline, crate::composition::model::TextBaseline::Middle);
    assert_eq!(surface.texts, [("Hi".to_string(), 0.0, 0.0)]);
}

#[test]
fn explicit_text_style_flows_through() {
    let mut layer = TextLayer::new("Go").at(12, 34).with_color("#336699");
    layer.size = "32".to_string();
    layer.weight = "bold".to_string();
    layer.font = "Georgia".to_string();

    let surface = apply_text(mock((1, 1)), &layer).unwrap();
    assert_eq!(surface.styles[0].font, "bold 32px \"Georgia\"");
    assert_eq!(surface.styles[0].fill, "#336699");
    assert_eq!(surface.texts, [("Go".to_string(), 12.0, 34.0)]);
}
