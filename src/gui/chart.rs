use std::f32::consts::{
    FRAC_PI_2,
    FRAC_PI_4,
};

use eframe::egui::{
    self,
    epaint::TextShape,
    Align2,
    Color32,
    FontId,
    Painter,
    Pos2,
    Rect,
    Stroke,
    Vec2,
};

use crate::core::TopList;

pub const CHART_WIDTH: f32 = 600.0;
pub const CHART_HEIGHT: f32 = 400.0;

const MARGIN_TOP: f32 = 20.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 60.0;
const MARGIN_LEFT: f32 = 60.0;

// Fraction of each band left empty, applied between bars and at both ends.
const BAND_PADDING: f32 = 0.1;
const TARGET_TICKS: u32 = 10;
const TICK_LENGTH: f32 = 6.0;
const LABEL_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 13.0;

/// Band scale on x, linear scale from 0 to the largest count on y.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: Rect,
    pub step: f32,
    pub band_width: f32,
    pub max_count: u32,
    bands: usize,
}

impl ChartLayout {
    pub fn new(frame: Rect, top_list: &TopList) -> Self {
        let plot = Rect::from_min_max(
            frame.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP),
            frame.max - Vec2::new(MARGIN_RIGHT, MARGIN_BOTTOM),
        );

        let bands = top_list.len();
        let step = if bands == 0 {
            0.0
        } else {
            plot.width() / (bands as f32 - BAND_PADDING + 2.0 * BAND_PADDING)
        };

        Self {
            plot,
            step,
            band_width: step * (1.0 - BAND_PADDING),
            max_count: top_list.max_count(),
            bands,
        }
    }

    pub fn band_start(&self, index: usize) -> f32 {
        let used = self.step * (self.bands as f32 - BAND_PADDING);
        let offset = (self.plot.width() - used) / 2.0;
        self.plot.left() + offset + self.step * index as f32
    }

    pub fn band_center(&self, index: usize) -> f32 {
        self.band_start(index) + self.band_width / 2.0
    }

    pub fn y_for(&self, value: f32) -> f32 {
        if self.max_count == 0 {
            return self.plot.bottom();
        }
        self.plot.bottom() - self.plot.height() * (value / self.max_count as f32)
    }

    pub fn bar_rect(&self, index: usize, count: u32) -> Rect {
        let left = self.band_start(index);
        Rect::from_min_max(
            Pos2::new(left, self.y_for(count as f32)),
            Pos2::new(left + self.band_width, self.plot.bottom()),
        )
    }
}

/// Integer tick values from 0 to `max`, roughly [`TARGET_TICKS`] of them, on a 1/2/5 step.
pub fn y_ticks(max: u32) -> Vec<u32> {
    if max == 0 {
        return vec![0];
    }

    let raw = max as f64 / TARGET_TICKS as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = ((factor * power).round() as u32).max(1);

    (0..=max / step).map(|i| i * step).collect()
}

pub struct BarChart;

impl BarChart {
    pub fn show(ui: &mut egui::Ui, top_list: &TopList) {
        let (response, painter) =
            ui.allocate_painter(Vec2::new(CHART_WIDTH, CHART_HEIGHT), egui::Sense::hover());

        let layout = ChartLayout::new(response.rect, top_list);
        let text_color = ui.visuals().text_color();
        let bar_color = ui.visuals().selection.bg_fill;

        if top_list.is_empty() {
            painter.text(
                layout.plot.center(),
                Align2::CENTER_CENTER,
                "No words found",
                FontId::proportional(TITLE_FONT_SIZE),
                text_color,
            );
            return;
        }

        for (index, entry) in top_list.entries().iter().enumerate() {
            painter.rect_filled(layout.bar_rect(index, entry.count), 0.0, bar_color);
        }

        Self::draw_x_axis(&painter, &layout, top_list, text_color);
        Self::draw_y_axis(&painter, &layout, text_color);
        Self::draw_titles(&painter, &layout, text_color);
    }

    fn draw_x_axis(painter: &Painter, layout: &ChartLayout, top_list: &TopList, color: Color32) {
        let stroke = Stroke::new(1.0, color);
        let bottom = layout.plot.bottom();
        painter.hline(layout.plot.x_range(), bottom, stroke);

        for (index, entry) in top_list.entries().iter().enumerate() {
            let x = layout.band_center(index);
            painter.vline(x, egui::Rangef::new(bottom, bottom + TICK_LENGTH), stroke);

            // Rotated -45° and anchored at its end so the label finishes under the tick.
            let galley = painter.layout_no_wrap(
                entry.word.clone(),
                FontId::proportional(LABEL_FONT_SIZE),
                color,
            );
            let reach = galley.size().x * FRAC_PI_4.cos();
            let anchor = Pos2::new(x, bottom + TICK_LENGTH + 2.0);
            let pos = Pos2::new(anchor.x - reach, anchor.y + reach);
            painter.add(TextShape::new(pos, galley, color).with_angle(-FRAC_PI_4));
        }
    }

    fn draw_y_axis(painter: &Painter, layout: &ChartLayout, color: Color32) {
        let stroke = Stroke::new(1.0, color);
        let left = layout.plot.left();
        painter.vline(left, layout.plot.y_range(), stroke);

        for tick in y_ticks(layout.max_count) {
            let y = layout.y_for(tick as f32);
            painter.hline(egui::Rangef::new(left - TICK_LENGTH, left), y, stroke);
            painter.text(
                Pos2::new(left - TICK_LENGTH - 3.0, y),
                Align2::RIGHT_CENTER,
                tick.to_string(),
                FontId::proportional(LABEL_FONT_SIZE),
                color,
            );
        }
    }

    fn draw_titles(painter: &Painter, layout: &ChartLayout, color: Color32) {
        let font = FontId::proportional(TITLE_FONT_SIZE);

        painter.text(
            Pos2::new(layout.plot.center().x, layout.plot.bottom() + MARGIN_BOTTOM - 8.0),
            Align2::CENTER_BOTTOM,
            "Word",
            font.clone(),
            color,
        );

        let galley = painter.layout_no_wrap("Count".to_string(), font, color);
        let pos = Pos2::new(
            layout.plot.left() - MARGIN_LEFT + 4.0,
            layout.plot.center().y + galley.size().x / 2.0,
        );
        painter.add(TextShape::new(pos, galley, color).with_angle(-FRAC_PI_2));
    }
}
