use generative_logo::palette::logo_color;

#[test]
fn test_color_channels_stay_in_range() {
    for ui in 0..=10 {
        for vi in 0..=10 {
            for ti in 0..=20 {
                let u = ui as f32 / 10.0;
                let v = vi as f32 / 10.0;
                let t = ti as f32 * 0.5;

                let rgb = logo_color(u, v, t);
                for (channel, value) in rgb.iter().enumerate() {
                    assert!(
                        (0.0..=1.0).contains(value),
                        "channel {} out of range at u={} v={} t={}: {}",
                        channel,
                        u,
                        v,
                        t,
                        value
                    );
                }
            }
        }
    }
}

#[test]
fn test_color_is_deterministic() {
    let a = logo_color(0.3, 0.7, 2.5);
    let b = logo_color(0.3, 0.7, 2.5);
    assert_eq!(a, b, "identical inputs must yield identical colors");
}

#[test]
fn test_color_is_continuous_in_time() {
    let step = 1e-3;
    for ti in 0..50 {
        let t = ti as f32 * 0.2;
        let a = logo_color(0.5, 0.5, t);
        let b = logo_color(0.5, 0.5, t + step);

        for channel in 0..3 {
            let jump = (a[channel] - b[channel]).abs();
            assert!(
                jump < 0.02,
                "discontinuity of {} in channel {} at t={}",
                jump,
                channel,
                t
            );
        }
    }
}

#[test]
fn test_color_progresses_over_time() {
    // One sample per second across ten seconds at a fixed point
    let samples: Vec<[f32; 3]> = (0..10)
        .map(|t| logo_color(0.5, 0.5, t as f32))
        .collect();

    let distinct = samples.windows(2).any(|pair| {
        (0..3).any(|channel| (pair[0][channel] - pair[1][channel]).abs() > 0.01)
    });
    assert!(distinct, "the color must visibly change as time advances");
}

#[test]
fn test_color_varies_across_the_label() {
    let left = logo_color(0.0, 0.5, 1.0);
    let right = logo_color(1.0, 0.5, 1.0);

    let difference: f32 = (0..3)
        .map(|channel| (left[channel] - right[channel]).abs())
        .sum();
    assert!(
        difference > 0.05,
        "the wave must vary across u, difference was {}",
        difference
    );
}
