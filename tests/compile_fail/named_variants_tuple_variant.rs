//! NamedVariants rejects variants that carry fields.

#[derive(extkit::variants::NamedVariants)]
enum Shape {
    Point,
    Circle(f64),
}

fn main() {
    for shape in [Shape::Point, Shape::Circle(1.0)] {
        if let Shape::Circle(radius) = shape {
            let _ = radius;
        }
    }
}
