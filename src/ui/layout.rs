use ratatui::layout::Rect;

/// Header (brand + nav), scrolling body, footer (key hints).
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Fixed-size rect centred in `area`, shrunk to fit.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Dropdown under the header's right edge for the mobile menu.
pub fn menu_rect(width: u16, height: u16, area: Rect) -> Rect {
    let (header, body, _) = layout_regions(area);
    let width = width.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: header.y + header.height,
        width,
        height: height.min(body.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_full_height() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn tiny_terminal_has_no_body() {
        let (_, body, _) = layout_regions(Rect::new(0, 0, 80, 4));
        assert_eq!(body.height, 0);
    }

    #[test]
    fn centered_rect_shrinks_to_area() {
        let rect = centered_rect_by_size(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(rect, Rect::new(0, 5, 40, 10));
    }

    #[test]
    fn menu_hangs_from_header_right() {
        let rect = menu_rect(20, 6, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(60, 3, 20, 6));
    }
}
