use crate::models::{
    CognitiveLevel, CourseDescriptor, CourseLearningOutcome, ProgramLearningOutcome,
    YearLearningOutcome,
};

/// Program learning outcomes for the environmental management curriculum.
/// Weights sum to 100; topic lists drive the CLO-to-PLO relation heuristic.
pub const PLOS: &[ProgramLearningOutcome] = &[
    ProgramLearningOutcome {
        code: "PLO1",
        description: "ประยุกต์ใช้เทคโนโลยีและนวัตกรรมเพื่อการจัดการสิ่งแวดล้อมร่วมกับชุมชนอย่างยั่งยืน",
        weight: 35.0,
        topics: &[
            "เทคโนโลยี",
            "นวัตกรรม",
            "GIS",
            "ภูมิสารสนเทศ",
            "ยั่งยืน",
            "ชุมชน",
            "สิ่งแวดล้อม",
            "technology",
            "sustainable",
        ],
    },
    ProgramLearningOutcome {
        code: "PLO2",
        description: "วิจัยและบูรณาการองค์ความรู้ข้ามศาสตร์เพื่อวิเคราะห์และแก้ไขปัญหาสิ่งแวดล้อม",
        weight: 35.0,
        topics: &[
            "วิจัย",
            "วิเคราะห์",
            "บูรณาการ",
            "ข้อมูล",
            "ประเมิน",
            "สถิติ",
            "research",
        ],
    },
    ProgramLearningOutcome {
        code: "PLO3",
        description: "สื่อสารและถ่ายทอดองค์ความรู้ด้านสิ่งแวดล้อมสู่สังคมได้อย่างมีประสิทธิภาพ",
        weight: 30.0,
        topics: &[
            "นำเสนอ",
            "อธิบาย",
            "สื่อสาร",
            "ถ่ายทอด",
            "เผยแพร่",
            "สัมมนา",
            "communication",
        ],
    },
];

/// Year learning outcomes, tagged with the cognitive level used as a
/// roll-up multiplier.
pub const YLOS: &[YearLearningOutcome] = &[
    YearLearningOutcome {
        code: "YLO1.1",
        description: "อธิบายหลักการและทฤษฎีพื้นฐานของการจัดการสิ่งแวดล้อม",
        year: "ปีที่ 1",
        level: CognitiveLevel::Understanding,
        related_plos: &["PLO1", "PLO2"],
    },
    YearLearningOutcome {
        code: "YLO1.2",
        description: "อธิบายระเบียบวิธีวิจัยและหลักการวิเคราะห์ข้อมูลสิ่งแวดล้อม",
        year: "ปีที่ 1",
        level: CognitiveLevel::Understanding,
        related_plos: &["PLO2"],
    },
    YearLearningOutcome {
        code: "YLO1.3",
        description: "ประยุกต์ใช้เทคโนโลยีภูมิสารสนเทศในงานด้านสิ่งแวดล้อม",
        year: "ปีที่ 1",
        level: CognitiveLevel::Applying,
        related_plos: &["PLO1"],
    },
    YearLearningOutcome {
        code: "YLO2.1",
        description: "ประยุกต์องค์ความรู้เพื่อแก้ไขปัญหาสิ่งแวดล้อมในพื้นที่จริงร่วมกับชุมชน",
        year: "ปีที่ 2",
        level: CognitiveLevel::Applying,
        related_plos: &["PLO1", "PLO2"],
    },
    YearLearningOutcome {
        code: "YLO2.2",
        description: "ประเมินและวิพากษ์งานวิจัยด้านการจัดการสิ่งแวดล้อมอย่างมีวิจารณญาณ",
        year: "ปีที่ 2",
        level: CognitiveLevel::Evaluating,
        related_plos: &["PLO2"],
    },
    YearLearningOutcome {
        code: "YLO2.3",
        description: "ประเมินผลกระทบสิ่งแวดล้อมและสื่อสารผลต่อผู้มีส่วนได้ส่วนเสีย",
        year: "ปีที่ 2",
        level: CognitiveLevel::Evaluating,
        related_plos: &["PLO2", "PLO3"],
    },
    YearLearningOutcome {
        code: "YLO2.4",
        description: "สร้างสรรค์งานวิจัยหรือนวัตกรรมเพื่อการจัดการสิ่งแวดล้อมอย่างยั่งยืน",
        year: "ปีที่ 2",
        level: CognitiveLevel::Creating,
        related_plos: &["PLO1", "PLO2", "PLO3"],
    },
];

/// Graduate course table for the program. Course codes follow the 282xxx
/// numbering of the faculty catalogue.
pub const COURSES: &[CourseDescriptor] = &[
    CourseDescriptor {
        code: "282701",
        name: "ระบบสิ่งแวดล้อมและการจัดการ",
        description: "หลักการของระบบสิ่งแวดล้อม ความสัมพันธ์ระหว่างมนุษย์กับสิ่งแวดล้อม แนวคิดการจัดการสิ่งแวดล้อมแบบองค์รวมและการพัฒนาที่ยั่งยืน",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายองค์ประกอบและความสัมพันธ์ของระบบสิ่งแวดล้อม",
                keywords: &["ระบบสิ่งแวดล้อม", "องค์ประกอบ", "ความสัมพันธ์"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์สาเหตุและผลกระทบของปัญหาสิ่งแวดล้อม",
                keywords: &["วิเคราะห์", "ผลกระทบ", "ปัญหา"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เสนอแนวทางการจัดการสิ่งแวดล้อมอย่างยั่งยืน",
                keywords: &["การจัดการ", "ยั่งยืน", "แนวทาง"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2"],
        ylo_mappings: &["YLO1.1"],
    },
    CourseDescriptor {
        code: "282702",
        name: "ระเบียบวิธีวิจัยทางสิ่งแวดล้อม",
        description: "กระบวนการวิจัยทางวิทยาศาสตร์สิ่งแวดล้อม การออกแบบการวิจัย การเก็บรวบรวมข้อมูล จริยธรรมการวิจัย และการเขียนโครงร่างวิจัย",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายกระบวนการวิจัยและการออกแบบการวิจัยทางสิ่งแวดล้อม",
                keywords: &["วิจัย", "ออกแบบ", "กระบวนการ"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "เลือกใช้วิธีการเก็บรวบรวมข้อมูลที่เหมาะสมกับโจทย์วิจัย",
                keywords: &["ข้อมูล", "เก็บรวบรวม", "เครื่องมือ"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เขียนโครงร่างวิจัยที่ถูกต้องตามหลักวิชาการ",
                keywords: &["โครงร่าง", "เขียน", "วิชาการ"],
            },
        ],
        plo_mappings: &["PLO2", "PLO3"],
        ylo_mappings: &["YLO1.2"],
    },
    CourseDescriptor {
        code: "282703",
        name: "สถิติและการวิเคราะห์ข้อมูลสิ่งแวดล้อม",
        description: "สถิติเชิงพรรณนาและเชิงอนุมานสำหรับข้อมูลสิ่งแวดล้อม การทดสอบสมมติฐาน การวิเคราะห์ความแปรปรวน และการใช้โปรแกรมสำเร็จรูปทางสถิติ",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "เลือกใช้สถิติที่เหมาะสมกับลักษณะข้อมูลสิ่งแวดล้อม",
                keywords: &["สถิติ", "ข้อมูล", "เลือกใช้"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์ข้อมูลด้วยโปรแกรมสำเร็จรูปและแปลผลได้",
                keywords: &["วิเคราะห์", "โปรแกรม", "แปลผล"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "นำเสนอผลการวิเคราะห์ข้อมูลในรูปแบบที่เข้าใจง่าย",
                keywords: &["นำเสนอ", "ตาราง", "กราฟ"],
            },
        ],
        plo_mappings: &["PLO2", "PLO3"],
        ylo_mappings: &["YLO1.2"],
    },
    CourseDescriptor {
        code: "282704",
        name: "เทคโนโลยีภูมิสารสนเทศเพื่อการจัดการสิ่งแวดล้อม",
        description: "หลักการรับรู้จากระยะไกล ระบบสารสนเทศภูมิศาสตร์ GIS การวิเคราะห์ข้อมูลเชิงพื้นที่ และการประยุกต์ใช้ภูมิสารสนเทศในการจัดการทรัพยากรธรรมชาติ",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายหลักการของระบบสารสนเทศภูมิศาสตร์และการรับรู้จากระยะไกล",
                keywords: &["GIS", "ภูมิสารสนเทศ", "รับรู้จากระยะไกล"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์ข้อมูลเชิงพื้นที่เพื่อสนับสนุนการตัดสินใจ",
                keywords: &["เชิงพื้นที่", "วิเคราะห์", "แผนที่"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "ประยุกต์ใช้เทคโนโลยีภูมิสารสนเทศกับงานจัดการสิ่งแวดล้อม",
                keywords: &["เทคโนโลยี", "ประยุกต์", "สิ่งแวดล้อม"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2"],
        ylo_mappings: &["YLO1.3"],
    },
    CourseDescriptor {
        code: "282711",
        name: "การประเมินผลกระทบสิ่งแวดล้อม",
        description: "หลักการและขั้นตอนการประเมินผลกระทบสิ่งแวดล้อม EIA การมีส่วนร่วมของประชาชน มาตรการป้องกันและแก้ไขผลกระทบ และการติดตามตรวจสอบ",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายหลักการและขั้นตอนการประเมินผลกระทบสิ่งแวดล้อม",
                keywords: &["ผลกระทบ", "ประเมิน", "ขั้นตอน"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์ผลกระทบของโครงการพัฒนาต่อสิ่งแวดล้อมและชุมชน",
                keywords: &["โครงการ", "วิเคราะห์", "ชุมชน"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เสนอมาตรการป้องกันและแก้ไขผลกระทบสิ่งแวดล้อม",
                keywords: &["มาตรการ", "ป้องกัน", "แก้ไข"],
            },
            CourseLearningOutcome {
                code: "CLO4",
                text: "สื่อสารผลการประเมินต่อผู้มีส่วนได้ส่วนเสีย",
                keywords: &["สื่อสาร", "ผู้มีส่วนได้ส่วนเสีย", "รายงาน"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2", "PLO3"],
        ylo_mappings: &["YLO2.3"],
    },
    CourseDescriptor {
        code: "282712",
        name: "การจัดการทรัพยากรน้ำ",
        description: "สถานการณ์และปัญหาทรัพยากรน้ำ การจัดการลุ่มน้ำแบบบูรณาการ คุณภาพน้ำ เทคโนโลยีการบำบัดน้ำเสีย และการมีส่วนร่วมของชุมชนในการจัดการน้ำอย่างยั่งยืน",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายสถานการณ์และปัญหาทรัพยากรน้ำในปัจจุบัน",
                keywords: &["ทรัพยากรน้ำ", "สถานการณ์", "ปัญหา"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์คุณภาพน้ำและแหล่งกำเนิดมลพิษทางน้ำ",
                keywords: &["คุณภาพน้ำ", "มลพิษ", "วิเคราะห์"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "ประยุกต์ใช้เทคโนโลยีการบำบัดน้ำเสียที่เหมาะสม",
                keywords: &["บำบัดน้ำเสีย", "เทคโนโลยี", "ประยุกต์"],
            },
            CourseLearningOutcome {
                code: "CLO4",
                text: "เสนอแนวทางการจัดการลุ่มน้ำร่วมกับชุมชนอย่างยั่งยืน",
                keywords: &["ลุ่มน้ำ", "ชุมชน", "ยั่งยืน"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2"],
        ylo_mappings: &["YLO2.1"],
    },
    CourseDescriptor {
        code: "282713",
        name: "การจัดการขยะและของเสียอันตราย",
        description: "ประเภทและแหล่งกำเนิดขยะมูลฝอยและของเสียอันตราย เทคโนโลยีการจัดการขยะ หลักการ 3R เศรษฐกิจหมุนเวียน และการจัดการขยะโดยชุมชน",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "จำแนกประเภทขยะมูลฝอยและของเสียอันตราย",
                keywords: &["ขยะ", "ของเสียอันตราย", "จำแนก"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "เปรียบเทียบเทคโนโลยีการจัดการขยะแบบต่าง ๆ",
                keywords: &["เทคโนโลยี", "การจัดการ", "เปรียบเทียบ"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "ออกแบบระบบการจัดการขยะโดยชุมชนตามหลักเศรษฐกิจหมุนเวียน",
                keywords: &["ชุมชน", "เศรษฐกิจหมุนเวียน", "ออกแบบ"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2"],
        ylo_mappings: &["YLO2.1"],
    },
    CourseDescriptor {
        code: "282714",
        name: "การจัดการคุณภาพอากาศและการเปลี่ยนแปลงสภาพภูมิอากาศ",
        description: "แหล่งกำเนิดและผลกระทบของมลพิษทางอากาศ ฝุ่นละออง PM2.5 ก๊าซเรือนกระจก การเปลี่ยนแปลงสภาพภูมิอากาศ และแนวทางการลดการปล่อยคาร์บอน",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายแหล่งกำเนิดและผลกระทบของมลพิษทางอากาศ",
                keywords: &["มลพิษทางอากาศ", "PM2.5", "ผลกระทบ"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์ข้อมูลคุณภาพอากาศและก๊าซเรือนกระจก",
                keywords: &["คุณภาพอากาศ", "ก๊าซเรือนกระจก", "วิเคราะห์"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เสนอแนวทางการปรับตัวและลดการปล่อยคาร์บอนอย่างยั่งยืน",
                keywords: &["คาร์บอน", "ปรับตัว", "ยั่งยืน"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2"],
        ylo_mappings: &["YLO2.1"],
    },
    CourseDescriptor {
        code: "282715",
        name: "การจัดการทรัพยากรป่าไม้และความหลากหลายทางชีวภาพ",
        description: "นิเวศวิทยาป่าไม้ ความหลากหลายทางชีวภาพ การอนุรักษ์และฟื้นฟูระบบนิเวศ ป่าชุมชน และการใช้ประโยชน์ทรัพยากรอย่างยั่งยืน",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายโครงสร้างและหน้าที่ของระบบนิเวศป่าไม้",
                keywords: &["ระบบนิเวศ", "ป่าไม้", "โครงสร้าง"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "ประเมินสถานภาพความหลากหลายทางชีวภาพในพื้นที่",
                keywords: &["ความหลากหลายทางชีวภาพ", "ประเมิน", "สำรวจ"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เสนอแนวทางการอนุรักษ์และฟื้นฟูป่าร่วมกับชุมชน",
                keywords: &["อนุรักษ์", "ฟื้นฟู", "ชุมชน"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2"],
        ylo_mappings: &["YLO2.1"],
    },
    CourseDescriptor {
        code: "282721",
        name: "เศรษฐศาสตร์สิ่งแวดล้อม",
        description: "แนวคิดทางเศรษฐศาสตร์ในการจัดการสิ่งแวดล้อม การประเมินมูลค่าทรัพยากรธรรมชาติ เครื่องมือทางเศรษฐศาสตร์ และการวิเคราะห์ต้นทุนผลประโยชน์",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายแนวคิดเศรษฐศาสตร์สิ่งแวดล้อมและความล้มเหลวของตลาด",
                keywords: &["เศรษฐศาสตร์", "ตลาด", "แนวคิด"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "ประเมินมูลค่าทรัพยากรธรรมชาติและสิ่งแวดล้อม",
                keywords: &["มูลค่า", "ประเมิน", "ทรัพยากรธรรมชาติ"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "วิเคราะห์ต้นทุนผลประโยชน์ของโครงการด้านสิ่งแวดล้อม",
                keywords: &["ต้นทุน", "ผลประโยชน์", "วิเคราะห์"],
            },
        ],
        plo_mappings: &["PLO2"],
        ylo_mappings: &["YLO2.2"],
    },
    CourseDescriptor {
        code: "282722",
        name: "กฎหมายและนโยบายสิ่งแวดล้อม",
        description: "กฎหมายสิ่งแวดล้อมของไทยและระหว่างประเทศ นโยบายสาธารณะด้านสิ่งแวดล้อม กระบวนการกำหนดนโยบาย และการบังคับใช้กฎหมาย",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายสาระสำคัญของกฎหมายสิ่งแวดล้อมที่เกี่ยวข้อง",
                keywords: &["กฎหมาย", "สิ่งแวดล้อม", "สาระสำคัญ"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์ช่องว่างของนโยบายและการบังคับใช้กฎหมาย",
                keywords: &["นโยบาย", "วิเคราะห์", "บังคับใช้"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เสนอข้อเสนอแนะเชิงนโยบายด้านสิ่งแวดล้อม",
                keywords: &["ข้อเสนอแนะ", "เชิงนโยบาย", "เสนอ"],
            },
        ],
        plo_mappings: &["PLO2", "PLO3"],
        ylo_mappings: &["YLO2.2"],
    },
    CourseDescriptor {
        code: "282723",
        name: "การมีส่วนร่วมของชุมชนในการจัดการสิ่งแวดล้อม",
        description: "แนวคิดการมีส่วนร่วม กระบวนการชุมชน เครื่องมือการทำงานกับชุมชน ภูมิปัญญาท้องถิ่น และกรณีศึกษาการจัดการทรัพยากรโดยชุมชน",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายแนวคิดและระดับของการมีส่วนร่วมของชุมชน",
                keywords: &["การมีส่วนร่วม", "ชุมชน", "แนวคิด"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "เลือกใช้เครื่องมือการทำงานร่วมกับชุมชนอย่างเหมาะสม",
                keywords: &["เครื่องมือ", "กระบวนการ", "ชุมชน"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "ถ่ายทอดบทเรียนจากกรณีศึกษาการจัดการทรัพยากรโดยชุมชน",
                keywords: &["ถ่ายทอด", "กรณีศึกษา", "ภูมิปัญญา"],
            },
        ],
        plo_mappings: &["PLO1", "PLO3"],
        ylo_mappings: &["YLO2.1"],
    },
    CourseDescriptor {
        code: "282731",
        name: "พลังงานทดแทนและเทคโนโลยีสะอาด",
        description: "แหล่งพลังงานทดแทน เทคโนโลยีพลังงานแสงอาทิตย์ ชีวมวล พลังงานลม เทคโนโลยีสะอาดในภาคอุตสาหกรรม และการประเมินความคุ้มค่าของระบบพลังงาน",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายหลักการของเทคโนโลยีพลังงานทดแทนแต่ละประเภท",
                keywords: &["พลังงานทดแทน", "เทคโนโลยี", "หลักการ"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "ประเมินความเหมาะสมของระบบพลังงานทดแทนสำหรับพื้นที่",
                keywords: &["ประเมิน", "ความเหมาะสม", "พื้นที่"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เสนอแนวทางการใช้เทคโนโลยีสะอาดเพื่อการพัฒนาที่ยั่งยืน",
                keywords: &["เทคโนโลยีสะอาด", "ยั่งยืน", "แนวทาง"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2"],
        ylo_mappings: &["YLO2.1"],
    },
    CourseDescriptor {
        code: "282732",
        name: "การพัฒนาที่ยั่งยืนและเป้าหมาย SDGs",
        description: "แนวคิดการพัฒนาที่ยั่งยืน เป้าหมายการพัฒนาที่ยั่งยืน SDGs ตัวชี้วัดความยั่งยืน และการขับเคลื่อน SDGs ในระดับท้องถิ่นและองค์กร",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "อธิบายแนวคิดการพัฒนาที่ยั่งยืนและเป้าหมาย SDGs",
                keywords: &["ยั่งยืน", "SDGs", "เป้าหมาย"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิเคราะห์ความเชื่อมโยงของ SDGs กับบริบทท้องถิ่น",
                keywords: &["วิเคราะห์", "ท้องถิ่น", "เชื่อมโยง"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "ออกแบบโครงการขับเคลื่อนความยั่งยืนร่วมกับชุมชน",
                keywords: &["โครงการ", "ชุมชน", "ออกแบบ"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2", "PLO3"],
        ylo_mappings: &["YLO2.4"],
    },
    CourseDescriptor {
        code: "282741",
        name: "สัมมนาการจัดการสิ่งแวดล้อม",
        description: "การค้นคว้าและนำเสนองานวิจัยด้านการจัดการสิ่งแวดล้อมที่ทันสมัย การอภิปรายเชิงวิชาการ การวิพากษ์งานวิจัย และการสื่อสารเชิงวิชาการ",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "สืบค้นและคัดเลือกงานวิจัยด้านสิ่งแวดล้อมที่ทันสมัย",
                keywords: &["สืบค้น", "งานวิจัย", "ทันสมัย"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "วิพากษ์งานวิจัยอย่างมีวิจารณญาณตามหลักวิชาการ",
                keywords: &["วิพากษ์", "วิจารณญาณ", "วิชาการ"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "นำเสนอและอภิปรายผลงานวิชาการได้อย่างมีประสิทธิภาพ",
                keywords: &["นำเสนอ", "อภิปราย", "สื่อสาร"],
            },
        ],
        plo_mappings: &["PLO2", "PLO3"],
        ylo_mappings: &["YLO2.2", "YLO2.3"],
    },
    CourseDescriptor {
        code: "282751",
        name: "วิทยานิพนธ์",
        description: "การทำวิจัยเชิงลึกภายใต้การดูแลของอาจารย์ที่ปรึกษา การสร้างองค์ความรู้หรือนวัตกรรมใหม่ด้านการจัดการสิ่งแวดล้อม และการเผยแพร่ผลงานวิชาการ",
        clos: &[
            CourseLearningOutcome {
                code: "CLO1",
                text: "ออกแบบและดำเนินการวิจัยด้านการจัดการสิ่งแวดล้อมอย่างเป็นระบบ",
                keywords: &["วิจัย", "ออกแบบ", "ดำเนินการ"],
            },
            CourseLearningOutcome {
                code: "CLO2",
                text: "สร้างองค์ความรู้หรือนวัตกรรมเพื่อแก้ไขปัญหาสิ่งแวดล้อม",
                keywords: &["นวัตกรรม", "องค์ความรู้", "สร้าง"],
            },
            CourseLearningOutcome {
                code: "CLO3",
                text: "เผยแพร่ผลงานวิจัยในวารสารหรือที่ประชุมวิชาการ",
                keywords: &["เผยแพร่", "วารสาร", "ที่ประชุมวิชาการ"],
            },
        ],
        plo_mappings: &["PLO1", "PLO2", "PLO3"],
        ylo_mappings: &["YLO2.4"],
    },
];

pub fn find_course(code: &str) -> Option<&'static CourseDescriptor> {
    COURSES.iter().find(|c| c.code == code)
}

pub fn find_plo(code: &str) -> Option<&'static ProgramLearningOutcome> {
    PLOS.iter().find(|p| p.code == code)
}

pub fn find_ylo(code: &str) -> Option<&'static YearLearningOutcome> {
    YLOS.iter().find(|y| y.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plo_weights_sum_to_one_hundred() {
        let total: f64 = PLOS.iter().map(|p| p.weight).sum();
        assert!((total - 100.0).abs() < 0.001);
    }

    #[test]
    fn every_course_mapping_resolves() {
        for course in COURSES {
            for plo in course.plo_mappings {
                assert!(find_plo(plo).is_some(), "{} maps unknown {}", course.code, plo);
            }
            for ylo in course.ylo_mappings {
                assert!(find_ylo(ylo).is_some(), "{} maps unknown {}", course.code, ylo);
            }
        }
    }

    #[test]
    fn every_ylo_relates_known_plos() {
        for ylo in YLOS {
            for plo in ylo.related_plos {
                assert!(find_plo(plo).is_some());
            }
        }
    }

    #[test]
    fn water_resource_course_is_present() {
        let course = find_course("282712").unwrap();
        assert_eq!(course.clos[0].keywords, &["ทรัพยากรน้ำ", "สถานการณ์", "ปัญหา"]);
        assert_eq!(course.clos.len(), 4);
    }
}
