//! Static birth-place table used by the intake form.
//!
//! Cities appear in display order; each maps to its urban districts.

static CITY_TABLE: &[(&str, &[&str])] = &[
    (
        "Beijing",
        &[
            "Dongcheng",
            "Xicheng",
            "Chaoyang",
            "Haidian",
            "Fengtai",
            "Shijingshan",
            "Tongzhou",
            "Changping",
        ],
    ),
    (
        "Shanghai",
        &[
            "Huangpu", "Xuhui", "Changning", "Jing'an", "Putuo", "Hongkou", "Yangpu", "Pudong",
        ],
    ),
    (
        "Guangzhou",
        &["Yuexiu", "Liwan", "Haizhu", "Tianhe", "Baiyun", "Huangpu", "Panyu"],
    ),
    (
        "Shenzhen",
        &["Futian", "Luohu", "Nanshan", "Yantian", "Bao'an", "Longgang", "Longhua"],
    ),
    (
        "Chengdu",
        &["Jinjiang", "Qingyang", "Jinniu", "Wuhou", "Chenghua", "Gaoxin"],
    ),
    (
        "Hangzhou",
        &["Shangcheng", "Gongshu", "Xihu", "Binjiang", "Xiaoshan", "Yuhang"],
    ),
    (
        "Wuhan",
        &["Jiang'an", "Jianghan", "Qiaokou", "Hanyang", "Wuchang", "Hongshan"],
    ),
    (
        "Xi'an",
        &["Xincheng", "Beilin", "Lianhu", "Yanta", "Weiyang", "Baqiao"],
    ),
    (
        "Nanjing",
        &["Xuanwu", "Qinhuai", "Jianye", "Gulou", "Qixia", "Jiangning"],
    ),
    (
        "Chongqing",
        &["Yuzhong", "Jiangbei", "Shapingba", "Jiulongpo", "Nan'an", "Yubei"],
    ),
];

/// Cities offered in the birth-city picker, in table order.
pub fn popular_cities() -> Vec<&'static str> {
    CITY_TABLE.iter().map(|(city, _)| *city).collect()
}

/// Districts of `city`. Unknown cities have no districts.
pub fn districts_for(city: &str) -> &'static [&'static str] {
    CITY_TABLE
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, districts)| *districts)
        .unwrap_or(&[])
}

pub fn is_known_city(city: &str) -> bool {
    CITY_TABLE.iter().any(|(name, _)| *name == city)
}
