use {
  super::*,
  image::Pixel,
};

#[test] fn rgba_roundtrip() -> Result<()> {
  let image = RgbaImage::from_fn(5, 3, |x, y| Rgba([x as u8, y as u8, 7, 100 + x as u8]));
  let raster = RasterBuffer::from_rgba_image(&image)?;
  assert_eq!(raster.layout(), PixelLayout::Rgba);
  assert_eq!(raster.pixel(4, 2), [4, 2, 7]);
  assert_eq!(raster.alpha(4, 2), 104);
  assert_eq!(raster.to_rgba_image(), image);
  Ok(())
}

#[test] fn rgb_image_is_opaque() -> Result<()> {
  let image = RgbImage::from_fn(2, 2, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 0]));
  let raster = RasterBuffer::from_rgb_image(&image)?;
  assert_eq!(raster.to_rgb_image(), image);
  assert!(raster.to_rgba_image().pixels().all(|p| p.channels()[3] == 255));
  Ok(())
}

#[test] fn empty_image_is_rejected() {
  assert!(RasterBuffer::from_rgba_image(&RgbaImage::new(0, 4)).is_err());
}

#[test] fn points_overlay() {
  let mut image = RgbaImage::from_pixel(10, 10, Rgba([255; 4]));
  draw_points(&mut image, &[Point2D::new(5.0, 5.0), Point2D::new(-20.0, 3.0)], 2.0);
  let red = Rgba([255, 0, 0, 255]);
  assert_eq!(*image.get_pixel(5, 5), red);
  assert_eq!(*image.get_pixel(7, 5), red);
  assert_eq!(*image.get_pixel(5, 3), red);
  // outside the disc
  assert_eq!(*image.get_pixel(7, 7), Rgba([255; 4]));
  assert_eq!(*image.get_pixel(0, 3), Rgba([255; 4]));
}
