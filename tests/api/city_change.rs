use astro_intake::cities::{districts_for, popular_cities};
use astro_intake::form::FormField;

use crate::helpers::spawn_form;

#[test]
fn every_city_loads_its_own_districts_and_clears_the_district() {
    // Arrange
    let mut form = spawn_form();
    form.change_city("Chongqing".to_string());
    form.update_field(FormField::BirthDistrict, "Yuzhong".to_string());

    for city in popular_cities() {
        // Act
        form.change_city(city.to_string());

        // Assert
        assert_eq!(form.districts(), districts_for(city));
        assert_eq!(form.state().birth_city, city);
        assert_eq!(form.state().birth_district, "");

        form.update_field(FormField::BirthDistrict, districts_for(city)[0].to_string());
    }
}

#[test]
fn an_unknown_city_has_no_districts() {
    // Arrange
    let mut form = spawn_form();
    form.change_city("Beijing".to_string());
    form.update_field(FormField::BirthDistrict, "Chaoyang".to_string());

    // Act
    form.change_city("Atlantis".to_string());

    // Assert
    assert!(form.districts().is_empty());
    assert_eq!(form.state().birth_district, "");
}

#[test]
fn other_fields_survive_a_city_change() {
    // Arrange
    let mut form = spawn_form();
    form.update_field(FormField::Email, "a@b.com".to_string());
    form.update_field(FormField::BirthDate, "2024-05-01".to_string());

    // Act
    form.change_city("Hangzhou".to_string());

    // Assert
    assert_eq!(form.state().email, "a@b.com");
    assert_eq!(form.state().birth_date, "2024-05-01");
}
